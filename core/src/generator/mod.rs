use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(&mut self, size: GridSize) -> Vec<Card>;
}

/// Deals the symbol keys a deck of `size` needs, each one twice, in catalog order.
pub(crate) fn paired_symbols(catalog: &SymbolCatalog, size: GridSize) -> Vec<SymbolKey> {
    let pool = catalog.take_wrapping(size.total_pairs().into());
    let mut symbols = Vec::with_capacity(pool.len() * 2);
    symbols.extend(pool.iter().cloned());
    symbols.extend(pool);
    symbols
}

pub(crate) fn deal(symbols: impl IntoIterator<Item = SymbolKey>) -> Vec<Card> {
    symbols
        .into_iter()
        .zip(0..)
        .map(|(symbol, id)| Card::face_down(id, symbol))
        .collect()
}

/// Lays pairs out next to each other: cards `2k` and `2k + 1` always match.
///
/// Handy for scripted hosts and tests that need to know where the pairs are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnshuffledDeckGenerator {
    catalog: SymbolCatalog,
}

impl UnshuffledDeckGenerator {
    pub fn new(catalog: SymbolCatalog) -> Self {
        Self { catalog }
    }
}

impl DeckGenerator for UnshuffledDeckGenerator {
    fn generate(&mut self, size: GridSize) -> Vec<Card> {
        let pool = self.catalog.take_wrapping(size.total_pairs().into());
        deal(pool.into_iter().flat_map(|symbol| [symbol.clone(), symbol]))
    }
}
