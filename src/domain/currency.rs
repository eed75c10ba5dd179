/// The closed set of currencies an account can be denominated in.
///
/// Every currency carries a display sign and a small stable id. Persisted
/// rows store the id, so the mapping is an explicit table rather than a
/// byproduct of declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Euro,
    Dollar,
}

impl Currency {
    /// All known currencies, in id order.
    pub const ALL: [Currency; 2] = [Currency::Euro, Currency::Dollar];

    pub fn sign(&self) -> char {
        match self {
            Currency::Euro => '€',
            Currency::Dollar => '$',
        }
    }

    /// Stable id used as the persistence key for this currency.
    pub fn id(&self) -> u8 {
        match self {
            Currency::Euro => 0,
            Currency::Dollar => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Euro => "Euro",
            Currency::Dollar => "Dollar",
        }
    }

    pub fn from_id(id: u8) -> Option<Currency> {
        match id {
            0 => Some(Currency::Euro),
            1 => Some(Currency::Dollar),
            _ => None,
        }
    }
}
