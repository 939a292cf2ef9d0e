use crate::domain::a001_product::error::{
    ProductError, MSG_INVALID_PRICE, MSG_INVALID_QUANTITY, MSG_MISSING_FIELDS,
};
use crate::shared::number_format::price_input_text;
use contracts::domain::a001_product::{parse_decimal, Product, ProductDto};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the product manager page owns: the loaded list, the raw form
/// inputs and the two flags driving the form mode and busy state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductListState {
    /// Server order, replaced wholesale on every reload
    pub products: Vec<Product>,
    pub name: String,
    pub price: String,
    pub quantity: String,
    /// `None` creates, `Some(id)` updates that record
    pub editing_id: Option<String>,
    pub loading: bool,
}

impl ProductListState {
    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Copy a listed product into the form and switch to edit mode
    pub fn begin_edit(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.price = price_input_text(product.price);
        self.quantity = product.quantity.to_string();
        self.editing_id = Some(product.id.clone());
    }

    /// Clear the form and go back to create mode
    pub fn reset_form(&mut self) {
        self.name.clear();
        self.price.clear();
        self.quantity.clear();
        self.editing_id = None;
    }

    /// Validate the raw inputs and build the request body
    pub fn form_to_dto(&self) -> Result<ProductDto, ProductError> {
        if [&self.name, &self.price, &self.quantity]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ProductError::Validation(MSG_MISSING_FIELDS));
        }

        let price = parse_decimal(&self.price).ok_or(ProductError::Validation(MSG_INVALID_PRICE))?;
        let quantity =
            parse_quantity(&self.quantity).ok_or(ProductError::Validation(MSG_INVALID_QUANTITY))?;

        Ok(ProductDto {
            name: self.name.trim().to_string(),
            price,
            quantity,
        })
    }
}

/// Whole number as typed in a numeric input: `"3"`, `" 3 "`, `"3.0"`
fn parse_quantity(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

/// Where a [`ProductListState`] lives.
///
/// The page keeps it in a signal; tests keep it in a `RefCell`. Closures
/// passed in must not call back into the store.
pub trait StateStore: Clone {
    fn read_state<R>(&self, f: impl FnOnce(&ProductListState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut ProductListState));
}

impl StateStore for RwSignal<ProductListState> {
    fn read_state<R>(&self, f: impl FnOnce(&ProductListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut ProductListState)) {
        self.update(f);
    }
}

impl StateStore for Rc<RefCell<ProductListState>> {
    fn read_state<R>(&self, f: impl FnOnce(&ProductListState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut ProductListState)) {
        f(&mut self.borrow_mut());
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
