//! Rental pricing.
//!
//! Every movie is priced independently from its unit price, its tier and the
//! number of rented days, and the rental total is the sum of those costs.
//!
//! | Tier          | Base days | Each extra day    |
//! |---------------|-----------|-------------------|
//! | `NewRelease`  | unlimited | -                 |
//! | `Regular`     | 3         | price + 15%       |
//! | `Old`         | 5         | price + 10%       |
//!
//! Amounts are plain `f64` and are never rounded. Callers that need cents
//! must round at the presentation edge.

/// Pricing classification of a movie.
///
/// Persisted as the movie's `type_id`: 1 = new release, 2 = regular, 3 = old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieTier {
    NewRelease,
    Regular,
    Old,
}

impl MovieTier {
    /// Maps a persisted movie type id onto a tier.
    ///
    /// Returns `None` for type ids that carry no pricing rule.
    pub fn from_type_id(type_id: i64) -> Option<Self> {
        match type_id {
            1 => Some(Self::NewRelease),
            2 => Some(Self::Regular),
            3 => Some(Self::Old),
            _ => None,
        }
    }

    /// Persisted movie type id for this tier.
    pub fn type_id(self) -> i64 {
        match self {
            Self::NewRelease => 1,
            Self::Regular => 2,
            Self::Old => 3,
        }
    }

    /// Days charged at the base rate and the surcharge applied to every day after them.
    fn surcharge_schedule(self) -> Option<(i64, f64)> {
        match self {
            Self::NewRelease => None,
            Self::Regular => Some((3, 0.15)),
            Self::Old => Some((5, 0.10)),
        }
    }
}

/// Snapshot of a movie taken for a single price calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovieLineItem {
    pub movie_id: i64,
    pub price: f64,
    pub tier: Option<MovieTier>,
}

impl MovieLineItem {
    pub fn new(movie_id: i64, price: f64, tier: Option<MovieTier>) -> Self {
        Self {
            movie_id,
            price,
            tier,
        }
    }

    /// Cost of renting this movie for `days` days.
    pub fn cost(&self, days: i64) -> f64 {
        let price = self.price;

        match self.tier.and_then(MovieTier::surcharge_schedule) {
            Some((base_days, rate)) if days > base_days => {
                let mut cost = price * base_days as f64;
                cost += (price + price * rate) * (days - base_days) as f64;
                cost
            }
            _ => price * days as f64,
        }
    }
}

/// Computes the total price of renting `items` for `days` days.
///
/// `days` is expected to be non-negative; zero days costs nothing.
pub fn calculate_total(items: &[MovieLineItem], days: i64) -> f64 {
    let mut total = 0.0;
    for item in items {
        total += item.cost(days);
    }
    total
}
