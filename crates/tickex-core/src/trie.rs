//! Prefix trie over ticker symbols, ranked by market capitalization.

use crate::error::IndexError;

/// Maximum number of completions returned below the exact match.
pub const TOP_COMPLETIONS: usize = 4;

const ALPHABET: usize = 26;
const ROOT: NodeId = 0;

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    /// Child per uppercase letter, referenced by arena index.
    children: [Option<NodeId>; ALPHABET],
    /// `Some` exactly when the path from the root to this node spells an
    /// inserted ticker. Listings without a known market cap are filtered
    /// before insertion, so zero-cap terminals never stand in for "absent".
    market_cap: Option<u64>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [None; ALPHABET],
            market_cap: None,
        }
    }
}

/// Autocomplete index over ticker symbols.
///
/// Nodes live in a single arena `Vec` and reference children by index, so
/// the tree needs no recursive ownership. The index is `Send + Sync`;
/// serving code shares a built index immutably (e.g. `Arc<TickerIndex>`)
/// and never mutates it from request handlers.
#[derive(Debug, Clone)]
pub struct TickerIndex {
    nodes: Vec<Node>,
    terminals: usize,
}

impl TickerIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            terminals: 0,
        }
    }

    /// Insert a ticker with its market capitalization.
    ///
    /// Re-inserting an existing ticker overwrites its market cap; there is
    /// never more than one terminal node per symbol.
    pub fn insert(&mut self, ticker: &str, market_cap: i64) -> Result<(), IndexError> {
        let slots = symbol_slots(ticker)?;
        if market_cap < 0 {
            return Err(IndexError::InvalidMarketCap {
                symbol: ticker.to_owned(),
                value: market_cap.to_string(),
            });
        }

        let mut node = ROOT;
        for slot in slots {
            node = match self.nodes[node].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node].children[slot] = Some(child);
                    child
                }
            };
        }

        if self.nodes[node].market_cap.is_none() {
            self.terminals += 1;
        }
        self.nodes[node].market_cap = Some(market_cap as u64);
        Ok(())
    }

    /// Return the ranked completions for a prefix.
    ///
    /// The prefix must already be uppercase; user input is normalized by
    /// the caller, not here. An exact match always comes first, followed by
    /// at most [`TOP_COMPLETIONS`] tickers that have the prefix as a proper
    /// prefix, ordered by market cap descending with ties broken by symbol
    /// ascending. The empty prefix and unreachable prefixes yield `None`.
    pub fn search(&self, prefix: &str) -> Result<Option<Vec<(String, u64)>>, IndexError> {
        if prefix.is_empty() {
            return Ok(None);
        }
        let slots = symbol_slots(prefix)?;

        let mut node = ROOT;
        for slot in slots {
            node = match self.nodes[node].children[slot] {
                Some(child) => child,
                None => return Ok(None),
            };
        }

        let mut results = Vec::new();
        if let Some(cap) = self.nodes[node].market_cap {
            results.push((prefix.to_owned(), cap));
        }

        // Full subtree walk, no rank pruning: symbols are short and the
        // subtree under a prefix stays small in practice.
        let mut completions = Vec::new();
        let mut label = String::from(prefix);
        self.collect_below(node, &mut label, &mut completions);
        completions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        completions.truncate(TOP_COMPLETIONS);
        results.extend(completions);

        Ok(if results.is_empty() { None } else { Some(results) })
    }

    /// Every (ticker, market cap) pair in symbol order.
    pub fn entries(&self) -> Vec<(String, u64)> {
        let mut out = Vec::with_capacity(self.terminals);
        let mut label = String::new();
        self.collect_below(ROOT, &mut label, &mut out);
        out
    }

    /// Number of tickers in the index.
    pub fn len(&self) -> usize {
        self.terminals
    }

    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    fn collect_below(&self, node: NodeId, label: &mut String, out: &mut Vec<(String, u64)>) {
        for (slot, child) in self.nodes[node].children.iter().enumerate() {
            let Some(child) = *child else { continue };
            label.push((b'A' + slot as u8) as char);
            if let Some(cap) = self.nodes[child].market_cap {
                out.push((label.clone(), cap));
            }
            self.collect_below(child, label, out);
            label.pop();
        }
    }
}

impl Default for TickerIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same (ticker, market cap) set, independent of node
/// layout, so a loaded snapshot compares equal to the index that wrote it.
impl PartialEq for TickerIndex {
    fn eq(&self, other: &Self) -> bool {
        self.terminals == other.terminals && self.entries() == other.entries()
    }
}

impl Eq for TickerIndex {}

/// Map a symbol to child-array slots, rejecting anything but uppercase A-Z.
fn symbol_slots(symbol: &str) -> Result<Vec<usize>, IndexError> {
    if symbol.is_empty() {
        return Err(IndexError::InvalidSymbol {
            symbol: symbol.to_owned(),
        });
    }
    symbol
        .bytes()
        .map(|byte| {
            if byte.is_ascii_uppercase() {
                Ok((byte - b'A') as usize)
            } else {
                Err(IndexError::InvalidSymbol {
                    symbol: symbol.to_owned(),
                })
            }
        })
        .collect()
}
