use crate::waste_category::Category;
use rand::Rng;

/// Picks a category when the classifier gives no usable answer.
pub trait FallbackPolicy {
    fn choose(&self) -> Category;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFallback;

impl FallbackPolicy for RandomFallback {
    fn choose(&self) -> Category {
        let index = rand::rng().random_range(0..Category::ALL.len());
        Category::ALL[index]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedFallback(pub Category);

impl FallbackPolicy for FixedFallback {
    fn choose(&self) -> Category {
        self.0
    }
}
