use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Internal integer identifier for a distinct input token.
///
/// Ids are assigned sequentially from 1 on first sight and are only valid
/// for the run that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(u32);

impl Item {
    pub fn new(id: u32) -> Self {
        Item(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

/// Dense per-item counter indexed by item id. Reads past the end of the
/// backing vector return 0; writes grow it on demand.
#[derive(Debug, Default, Clone)]
pub struct ItemCounts {
    counts: Vec<u64>,
}

impl ItemCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item, count: u64) {
        let idx = item.id() as usize;
        if idx >= self.counts.len() {
            self.counts.resize(idx + 1, 0);
        }
        self.counts[idx] += count;
    }

    pub fn get(&self, item: Item) -> u64 {
        self.counts.get(item.id() as usize).copied().unwrap_or(0)
    }
}

/// Converts between input tokens and [`Item`] ids.
///
/// Tokens are trimmed of surrounding whitespace before interning; tokens
/// that are empty after trimming are skipped. Interning is deterministic
/// within a run: the first distinct token receives id 1, the next 2, etc.
pub struct Itemizer {
    ids: FxHashMap<String, Item>,
    tokens: Vec<String>,
}

impl Default for Itemizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Itemizer {
    pub fn new() -> Self {
        Self {
            ids: FxHashMap::default(),
            tokens: Vec::new(),
        }
    }

    /// Number of distinct items interned so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Interns a single token. Returns `None` if the token is empty after
    /// trimming.
    pub fn intern(&mut self, token: &str) -> Option<Item> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if let Some(&item) = self.ids.get(token) {
            return Some(item);
        }
        let item = Item::new(self.tokens.len() as u32 + 1);
        self.ids.insert(token.to_owned(), item);
        self.tokens.push(token.to_owned());
        Some(item)
    }

    /// Converts the tokens of one transaction into a list of distinct
    /// items, preserving first-occurrence order.
    pub fn itemize<'a, I>(&mut self, tokens: I) -> Vec<Item>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut items = Vec::new();
        for token in tokens {
            if let Some(item) = self.intern(token) {
                if !items.contains(&item) {
                    items.push(item);
                }
            }
        }
        items
    }

    /// As [`Itemizer::itemize`], but keeps only items whose global count
    /// meets `min_count`.
    pub fn filter_frequent<'a, I>(
        &mut self,
        tokens: I,
        counts: &ItemCounts,
        min_count: u64,
    ) -> Vec<Item>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut items = self.itemize(tokens);
        items.retain(|&item| counts.get(item) >= min_count);
        items
    }

    /// The token an item was interned from.
    ///
    /// Panics if the item was never interned by this itemizer; that is a
    /// caller bug, not an input condition.
    pub fn token(&self, item: Item) -> &str {
        let idx = item.id() as usize;
        assert!(
            idx >= 1 && idx <= self.tokens.len(),
            "item {} was not interned by this itemizer",
            item.id()
        );
        &self.tokens[idx - 1]
    }

    /// Orders two items by their token strings.
    pub fn cmp_tokens(&self, a: Item, b: Item) -> Ordering {
        self.token(a).cmp(self.token(b))
    }
}
