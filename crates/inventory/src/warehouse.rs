use std::collections::HashSet;

use stockroom_core::{CodeSequence, DomainError, DomainResult, ItemCode, position_by_id};
use stockroom_sequence::DynamicSequence;

use crate::article::{Article, NewArticle};

/// Record store for articles.
///
/// Articles are kept in insertion order; lookups scan linearly by code. The
/// code allocator belongs to this instance, so two warehouses never share a
/// counter.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    articles: DynamicSequence<Article>,
    codes: CodeSequence,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved articles.
    ///
    /// Code allocation resumes after the highest stored code. Fails with
    /// [`DomainError::Conflict`] if two articles share a code.
    pub fn from_articles(articles: DynamicSequence<Article>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(article.code()) {
                return Err(DomainError::conflict(format!(
                    "duplicate item code {}",
                    article.code()
                )));
            }
        }

        let codes = match seen.into_iter().max() {
            Some(last) => CodeSequence::starting_after(last),
            None => CodeSequence::new(),
        };
        tracing::debug!("restored warehouse with {} articles", articles.len());
        Ok(Self { articles, codes })
    }

    /// Store a new article under a freshly allocated code.
    pub fn add(&mut self, fields: NewArticle) -> DomainResult<ItemCode> {
        let code = self.codes.allocate()?;
        self.articles.try_append(Article::new(code, fields))?;
        tracing::debug!("added article {code}");
        Ok(code)
    }

    pub fn contains(&self, code: ItemCode) -> bool {
        position_by_id(&self.articles, &code).is_some()
    }

    pub fn get(&self, code: ItemCode) -> DomainResult<&Article> {
        let index = self.position(code)?;
        Ok(self.articles.get(index)?)
    }

    /// Remove the article with `code` and return it.
    pub fn remove(&mut self, code: ItemCode) -> DomainResult<Article> {
        let index = self.position(code)?;
        let removed = self.articles.remove_at(index)?;
        tracing::debug!("removed article {code}");
        Ok(removed)
    }

    /// Replace every field of the article with `code`, keeping the code.
    /// Returns the article as it was before.
    pub fn modify(&mut self, code: ItemCode, fields: NewArticle) -> DomainResult<Article> {
        let index = self.position(code)?;
        let article = self.articles.get_mut(index)?;
        let previous = article.clone();
        article.overwrite(fields);
        tracing::debug!("modified article {code}");
        Ok(previous)
    }

    /// Increase the units of `code` by `units`. Returns the new count.
    pub fn add_units(&mut self, code: ItemCode, units: u32) -> DomainResult<u32> {
        let article = self.get_mut(code)?;
        let total = article.units().checked_add(units).ok_or_else(|| {
            DomainError::validation(format!("units of item {code} would overflow"))
        })?;
        article.set_units(total);
        tracing::debug!("item {code}: +{units} units, now {total}");
        Ok(total)
    }

    /// Decrease the units of `code` by `units`. Returns the new count.
    pub fn remove_units(&mut self, code: ItemCode, units: u32) -> DomainResult<u32> {
        let article = self.get_mut(code)?;
        let Some(total) = article.units().checked_sub(units) else {
            tracing::warn!(
                "item {code}: cannot remove {units} units, only {} in stock",
                article.units()
            );
            return Err(DomainError::invariant("stock cannot go negative"));
        };
        article.set_units(total);
        tracing::debug!("item {code}: -{units} units, now {total}");
        Ok(total)
    }

    /// Articles whose units are below their safety stock, in stored order.
    pub fn below_safety_stock(&self) -> impl Iterator<Item = &Article> + '_ {
        self.articles
            .iter()
            .filter(|article| article.is_below_safety_stock())
    }

    /// Reorder stored articles by name, then brand. Stable.
    pub fn sort_by_name(&mut self) {
        self.articles
            .sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.brand().cmp(b.brand())));
    }

    pub fn articles(&self) -> &DynamicSequence<Article> {
        &self.articles
    }

    pub fn into_articles(self) -> DynamicSequence<Article> {
        self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    fn get_mut(&mut self, code: ItemCode) -> DomainResult<&mut Article> {
        let index = self.position(code)?;
        Ok(self.articles.get_mut(index)?)
    }

    fn position(&self, code: ItemCode) -> DomainResult<usize> {
        position_by_id(&self.articles, &code).ok_or_else(|| {
            tracing::warn!("item code {code} not in warehouse");
            DomainError::not_found(format!("item code {code}"))
        })
    }
}

impl core::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for article in &self.articles {
            writeln!(f, "{article}")?;
        }
        Ok(())
    }
}
