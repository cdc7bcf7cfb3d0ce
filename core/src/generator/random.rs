use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Deals a uniformly shuffled deck from a catalog, drawing randomness from `R`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator<R = SmallRng> {
    rng: R,
    catalog: SymbolCatalog,
}

impl RandomDeckGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDeckGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            catalog: SymbolCatalog::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }
}

impl<R: Rng> DeckGenerator for RandomDeckGenerator<R> {
    fn generate(&mut self, size: GridSize) -> Vec<Card> {
        let mut symbols = paired_symbols(&self.catalog, size);
        shuffle(&mut self.rng, &mut symbols);
        log::debug!(
            "Dealt {}x{} deck, {} pairs",
            size.get(),
            size.get(),
            size.total_pairs()
        );
        deal(symbols)
    }
}

/// Fisher-Yates: walks from the back, swapping each slot with a uniformly picked slot at or before it.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
