//! Product registry keyed by product id
//!
//! The registry keeps at most one product per id. Registering an id twice
//! replaces the earlier record wholesale, so the registry always holds the most
//! recently parsed occurrence of each product. Iteration is ordered by id.

use crate::catalog::Product;
use std::collections::BTreeMap;

/// Collection of discovered products, one entry per id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRegistry {
    products: BTreeMap<String, Product>,
}

impl ProductRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product, replacing any earlier record with the same id
    ///
    /// # Returns
    ///
    /// The previously registered product for this id, if any
    pub fn register(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id.clone(), product)
    }

    /// Looks up a product by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Returns true if a product with this id has been registered
    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over products in id order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Iterates over registered ids in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }
}

impl Extend<Product> for ProductRegistry {
    fn extend<T: IntoIterator<Item = Product>>(&mut self, iter: T) {
        for product in iter {
            self.register(product);
        }
    }
}

impl FromIterator<Product> for ProductRegistry {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl IntoIterator for ProductRegistry {
    type Item = Product;
    type IntoIter = std::collections::btree_map::IntoValues<String, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_values()
    }
}
