use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemCode};

/// Caller-supplied fields of an article. The store assigns the code.
///
/// Prices are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub name: String,
    pub brand: String,
    pub purchase_price: u64,
    pub sale_price: u64,
    pub units: u32,
    pub safety_stock: u32,
    pub max_stock: Option<u32>,
}

impl NewArticle {
    /// Article with no stock thresholds.
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            purchase_price: 0,
            sale_price: 0,
            units: 0,
            safety_stock: 0,
            max_stock: None,
        }
    }

    pub fn prices(mut self, purchase: u64, sale: u64) -> Self {
        self.purchase_price = purchase;
        self.sale_price = sale;
        self
    }

    pub fn units(mut self, units: u32) -> Self {
        self.units = units;
        self
    }

    pub fn stock_limits(mut self, safety: u32, maximum: Option<u32>) -> Self {
        self.safety_stock = safety;
        self.max_stock = maximum;
        self
    }
}

/// A stored stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    code: ItemCode,
    name: String,
    brand: String,
    purchase_price: u64,
    sale_price: u64,
    units: u32,
    safety_stock: u32,
    max_stock: Option<u32>,
}

impl Article {
    pub(crate) fn new(code: ItemCode, fields: NewArticle) -> Self {
        let mut article = Self {
            code,
            name: String::new(),
            brand: String::new(),
            purchase_price: 0,
            sale_price: 0,
            units: 0,
            safety_stock: 0,
            max_stock: None,
        };
        article.overwrite(fields);
        article
    }

    /// Replace every field except the code.
    pub(crate) fn overwrite(&mut self, fields: NewArticle) {
        let NewArticle {
            name,
            brand,
            purchase_price,
            sale_price,
            units,
            safety_stock,
            max_stock,
        } = fields;
        self.name = name;
        self.brand = brand;
        self.purchase_price = purchase_price;
        self.sale_price = sale_price;
        self.units = units;
        self.safety_stock = safety_stock;
        self.max_stock = max_stock;
    }

    pub(crate) fn set_units(&mut self, units: u32) {
        self.units = units;
    }

    pub fn code(&self) -> ItemCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn purchase_price(&self) -> u64 {
        self.purchase_price
    }

    pub fn sale_price(&self) -> u64 {
        self.sale_price
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn safety_stock(&self) -> u32 {
        self.safety_stock
    }

    pub fn max_stock(&self) -> Option<u32> {
        self.max_stock
    }

    /// True when fewer units are on hand than the safety stock.
    pub fn is_below_safety_stock(&self) -> bool {
        self.units < self.safety_stock
    }
}

impl Entity for Article {
    type Id = ItemCode;

    fn id(&self) -> &ItemCode {
        &self.code
    }
}

impl core::fmt::Display for Article {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "#{} {} ({}) units={} safety={} max=",
            self.code, self.name, self.brand, self.units, self.safety_stock
        )?;
        match self.max_stock {
            Some(max) => write!(f, "{max}")?,
            None => f.write_str("-")?,
        }
        write!(f, " buy={} sell={}", self.purchase_price, self.sale_price)
    }
}
