use super::state::{ProductListState, StateStore};
use crate::domain::a001_product::api::ProductApi;
use crate::domain::a001_product::error::ProductError;
use crate::shared::notify::Notifier;
use contracts::domain::a001_product::{parse_product_list, Product};

pub const MSG_CREATED: &str = "Produto cadastrado!";
pub const MSG_UPDATED: &str = "Produto atualizado!";
pub const MSG_CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este produto?";

/// Controller behind the product manager page.
///
/// Every mutation is followed by a full reload of the collection; nothing is
/// inserted or patched locally.
#[derive(Clone)]
pub struct ProductManager<A, N, S> {
    api: A,
    notifier: N,
    store: S,
}

impl<A, N, S> ProductManager<A, N, S>
where
    A: ProductApi,
    N: Notifier,
    S: StateStore,
{
    pub fn new(api: A, notifier: N, store: S) -> Self {
        Self {
            api,
            notifier,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_busy(&self) -> bool {
        self.store.read_state(|s| s.loading)
    }

    /// Fetch and normalize the whole collection.
    ///
    /// On failure the current list is kept.
    pub async fn load(&self) -> Result<(), ProductError> {
        let _busy = BusyGuard::acquire(&self.store);
        self.reload().await
    }

    /// Fill the form from `product` and switch to edit mode
    pub fn begin_edit(&self, product: &Product) {
        log::debug!("editing product {:?}", product.id);
        self.store.update_state(|s| s.begin_edit(product));
    }

    pub fn cancel_edit(&self) {
        self.store.update_state(ProductListState::reset_form);
    }

    /// Create or update depending on the form mode
    pub async fn submit(&self) -> Result<(), ProductError> {
        if self.is_busy() {
            log::warn!("submit ignored: a request is already in flight");
            return Ok(());
        }

        let prepared = self
            .store
            .read_state(|s| s.form_to_dto().map(|dto| (dto, s.editing_id.clone())));
        let (dto, editing_id) = match prepared {
            Ok(v) => v,
            Err(e) => return Err(self.report(e)),
        };

        let _busy = BusyGuard::acquire(&self.store);
        log::debug!("sending product {:?} (editing: {:?})", dto, editing_id);

        let result = match editing_id.as_deref() {
            Some(id) => self.api.update(id, &dto).await,
            None => self.api.create(&dto).await,
        };
        if let Err(e) = result {
            return Err(self.report(ProductError::Save(e)));
        }

        self.store.update_state(ProductListState::reset_form);
        // a failed reload has already been reported; the save itself went through
        let _ = self.reload().await;

        self.notifier.alert(if editing_id.is_some() {
            MSG_UPDATED
        } else {
            MSG_CREATED
        });
        Ok(())
    }

    /// Delete after the user confirms. Declining does nothing.
    pub async fn delete(&self, id: &str) -> Result<(), ProductError> {
        if self.is_busy() {
            log::warn!("delete ignored: a request is already in flight");
            return Ok(());
        }
        if !self.notifier.confirm(MSG_CONFIRM_DELETE) {
            log::debug!("delete of {:?} cancelled", id);
            return Ok(());
        }

        let _busy = BusyGuard::acquire(&self.store);
        if let Err(e) = self.api.delete(id).await {
            return Err(self.report(ProductError::Delete(e)));
        }

        self.store.update_state(|s| {
            if s.editing_id.as_deref() == Some(id) {
                s.reset_form();
            }
        });
        let _ = self.reload().await;
        Ok(())
    }

    async fn reload(&self) -> Result<(), ProductError> {
        let body = match self.api.fetch_all().await {
            Ok(body) => body,
            Err(e) => return Err(self.report(ProductError::Fetch(e))),
        };
        log::debug!("raw products payload: {}", body);

        let products = match parse_product_list(&body) {
            Ok(products) => products,
            Err(e) => return Err(self.report(ProductError::Fetch(e))),
        };
        log::debug!("normalized products: {:?}", products);

        self.store.update_state(|s| s.products = products);
        Ok(())
    }

    fn report(&self, err: ProductError) -> ProductError {
        log::error!("{}", err);
        self.notifier.alert(err.user_message());
        err
    }
}

/// Holds the busy flag; clears it when dropped, on every exit path.
struct BusyGuard<S: StateStore> {
    store: S,
}

impl<S: StateStore> BusyGuard<S> {
    fn acquire(store: &S) -> Self {
        store.update_state(|s| s.loading = true);
        Self {
            store: store.clone(),
        }
    }
}

impl<S: StateStore> Drop for BusyGuard<S> {
    fn drop(&mut self) {
        self.store.update_state(|s| s.loading = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::error::{
        MSG_DELETE_FAILED, MSG_FETCH_FAILED, MSG_MISSING_FIELDS, MSG_SAVE_FAILED,
    };
    use async_trait::async_trait;
    use contracts::domain::a001_product::ProductDto;
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Store = Rc<RefCell<ProductListState>>;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FetchAll,
        Create(ProductDto),
        Update(String, ProductDto),
        Delete(String),
    }

    /// In-memory collection that records every call
    #[derive(Clone)]
    struct FakeApi {
        body: Rc<RefCell<Value>>,
        calls: Rc<RefCell<Vec<Call>>>,
        fail_fetch: Rc<Cell<bool>>,
        fail_save: Rc<Cell<bool>>,
        fail_delete: Rc<Cell<bool>>,
        busy_seen: Rc<RefCell<Vec<bool>>>,
        store: Store,
    }

    impl FakeApi {
        fn new(body: Value, store: &Store) -> Self {
            Self {
                body: Rc::new(RefCell::new(body)),
                calls: Rc::default(),
                fail_fetch: Rc::default(),
                fail_save: Rc::default(),
                fail_delete: Rc::default(),
                busy_seen: Rc::default(),
                store: store.clone(),
            }
        }

        fn record(&self, call: Call) {
            self.busy_seen.borrow_mut().push(self.store.borrow().loading);
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ProductApi for FakeApi {
        async fn fetch_all(&self) -> Result<Value, String> {
            self.record(Call::FetchAll);
            if self.fail_fetch.get() {
                return Err("HTTP error: 500".to_string());
            }
            Ok(self.body.borrow().clone())
        }

        async fn create(&self, dto: &ProductDto) -> Result<(), String> {
            self.record(Call::Create(dto.clone()));
            if self.fail_save.get() {
                return Err("HTTP error: 400".to_string());
            }
            Ok(())
        }

        async fn update(&self, id: &str, dto: &ProductDto) -> Result<(), String> {
            self.record(Call::Update(id.to_string(), dto.clone()));
            if self.fail_save.get() {
                return Err("HTTP error: 400".to_string());
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), String> {
            self.record(Call::Delete(id.to_string()));
            if self.fail_delete.get() {
                return Err("HTTP error: 404".to_string());
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeNotifier {
        alerts: Rc<RefCell<Vec<String>>>,
        confirms: Rc<Cell<usize>>,
        decline: Rc<Cell<bool>>,
    }

    impl FakeNotifier {
        fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl Notifier for FakeNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            !self.decline.get()
        }
    }

    fn setup(body: Value) -> (ProductManager<FakeApi, FakeNotifier, Store>, FakeApi, FakeNotifier) {
        let store: Store = Rc::default();
        let api = FakeApi::new(body, &store);
        let notifier = FakeNotifier::default();
        let manager = ProductManager::new(api.clone(), notifier.clone(), store);
        (manager, api, notifier)
    }

    fn two_products() -> Value {
        json!([
            { "id": "1", "name": "Caderno", "price": 12.9, "quantity": 7 },
            { "_id": "2", "nome": "Caneta", "valor": "2,50", "estoque": 0 }
        ])
    }

    fn set_form(manager: &ProductManager<FakeApi, FakeNotifier, Store>, name: &str, price: &str, quantity: &str) {
        manager.store().update_state(|s| {
            s.name = name.to_string();
            s.price = price.to_string();
            s.quantity = quantity.to_string();
        });
    }

    #[tokio::test]
    async fn test_load_normalizes_wrapped_payload() {
        let (manager, api, notifier) =
            setup(json!({ "data": [{ "nome": "Caneta", "valor": "2,50", "estoque": 5 }] }));

        manager.load().await.unwrap();

        let products = manager.store().read_state(|s| s.products.clone());
        assert_eq!(
            products,
            vec![Product {
                id: String::new(),
                name: "Caneta".to_string(),
                price: 2.5,
                quantity: 5,
            }]
        );
        assert_eq!(api.calls(), vec![Call::FetchAll]);
        assert_eq!(*api.busy_seen.borrow(), vec![true]);
        assert!(!manager.is_busy());
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() {
        let (manager, _api, _notifier) = setup(two_products());

        manager.load().await.unwrap();
        let first = manager.store().read_state(|s| s.products.clone());
        manager.load().await.unwrap();
        let second = manager.store().read_state(|s| s.products.clone());

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        let (manager, api, notifier) = setup(two_products());
        manager.load().await.unwrap();

        api.fail_fetch.set(true);
        let err = manager.load().await.unwrap_err();

        assert!(matches!(err, ProductError::Fetch(_)));
        assert_eq!(manager.store().read_state(|s| s.products.len()), 2);
        assert_eq!(notifier.alerts(), vec![MSG_FETCH_FAILED.to_string()]);
        assert!(!manager.is_busy());
    }

    #[tokio::test]
    async fn test_malformed_body_keeps_previous_list() {
        let (manager, api, notifier) = setup(two_products());
        manager.load().await.unwrap();

        *api.body.borrow_mut() = Value::Null;
        let err = manager.load().await.unwrap_err();

        assert!(matches!(err, ProductError::Fetch(_)));
        assert_eq!(manager.store().read_state(|s| s.products.len()), 2);
        assert_eq!(notifier.alerts(), vec![MSG_FETCH_FAILED.to_string()]);

        *api.body.borrow_mut() = json!({ "data": { "name": "x" } });
        assert!(manager.load().await.is_err());
        assert_eq!(manager.store().read_state(|s| s.products.len()), 2);
        assert!(!manager.is_busy());
    }

    #[tokio::test]
    async fn test_create_sends_converted_body_and_reloads() {
        let (manager, api, notifier) = setup(two_products());
        set_form(&manager, "Widget", "10,50", "3");

        manager.submit().await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::Create(ProductDto {
                    name: "Widget".to_string(),
                    price: 10.5,
                    quantity: 3,
                }),
                Call::FetchAll,
            ]
        );
        // busy for the save and the reload that follows it
        assert_eq!(*api.busy_seen.borrow(), vec![true, true]);
        manager.store().read_state(|s| {
            assert!(s.name.is_empty() && s.price.is_empty() && s.quantity.is_empty());
            assert_eq!(s.editing_id, None);
            assert_eq!(s.products.len(), 2);
            assert!(!s.loading);
        });
        assert_eq!(notifier.alerts(), vec![MSG_CREATED.to_string()]);
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let (manager, api, _notifier) = setup(two_products());
        set_form(&manager, "  Widget ", "1", "2");

        manager.submit().await.unwrap();

        assert_eq!(
            api.calls()[0],
            Call::Create(ProductDto {
                name: "Widget".to_string(),
                price: 1.0,
                quantity: 2,
            })
        );
    }

    #[tokio::test]
    async fn test_failed_reload_after_save_still_succeeds() {
        let (manager, api, notifier) = setup(two_products());
        manager.load().await.unwrap();
        set_form(&manager, "Widget", "1", "1");
        api.fail_fetch.set(true);

        manager.submit().await.unwrap();

        assert_eq!(api.calls().len(), 3);
        assert!(matches!(api.calls()[1], Call::Create(_)));
        manager.store().read_state(|s| {
            assert!(s.name.is_empty() && s.price.is_empty() && s.quantity.is_empty());
            assert_eq!(s.products.len(), 2);
            assert!(!s.loading);
        });
        assert_eq!(
            notifier.alerts(),
            vec![MSG_FETCH_FAILED.to_string(), MSG_CREATED.to_string()]
        );
    }

    #[tokio::test]
    async fn test_edit_then_submit_unchanged_issues_put() {
        let (manager, api, notifier) = setup(two_products());
        manager.load().await.unwrap();

        let caneta = manager.store().read_state(|s| s.products[1].clone());
        manager.begin_edit(&caneta);
        manager.submit().await.unwrap();

        assert_eq!(
            api.calls()[1],
            Call::Update(
                "2".to_string(),
                ProductDto {
                    name: "Caneta".to_string(),
                    price: 2.5,
                    quantity: 0,
                }
            )
        );
        assert_eq!(api.calls()[2], Call::FetchAll);
        assert_eq!(manager.store().read_state(|s| s.editing_id.clone()), None);
        assert_eq!(notifier.alerts(), vec![MSG_UPDATED.to_string()]);
    }

    #[tokio::test]
    async fn test_empty_name_makes_no_request() {
        let (manager, api, notifier) = setup(two_products());
        set_form(&manager, "", "1", "1");

        let err = manager.submit().await.unwrap_err();

        assert_eq!(err, ProductError::Validation(MSG_MISSING_FIELDS));
        assert!(api.calls().is_empty());
        assert_eq!(notifier.alerts(), vec![MSG_MISSING_FIELDS.to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_save_keeps_form() {
        let (manager, api, notifier) = setup(two_products());
        set_form(&manager, "Widget", "abc1", "3");
        assert!(matches!(
            manager.submit().await,
            Err(ProductError::Validation(_))
        ));

        set_form(&manager, "Widget", "9", "3");
        api.fail_save.set(true);
        let err = manager.submit().await.unwrap_err();

        assert!(matches!(err, ProductError::Save(_)));
        assert_eq!(api.calls().len(), 1);
        manager.store().read_state(|s| {
            assert_eq!(s.name, "Widget");
            assert_eq!(s.price, "9");
            assert_eq!(s.quantity, "3");
            assert!(!s.loading);
        });
        assert_eq!(notifier.alerts().last().map(String::as_str), Some(MSG_SAVE_FAILED));
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_ignored() {
        let (manager, api, notifier) = setup(two_products());
        set_form(&manager, "Widget", "1", "1");
        manager.store().update_state(|s| s.loading = true);

        manager.submit().await.unwrap();

        assert!(api.calls().is_empty());
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_delete_while_busy_is_ignored() {
        let (manager, api, notifier) = setup(two_products());
        manager.store().update_state(|s| s.loading = true);

        manager.delete("1").await.unwrap();

        assert_eq!(notifier.confirms.get(), 0);
        assert!(api.calls().is_empty());
        assert!(notifier.alerts().is_empty());
        assert!(manager.is_busy());
    }

    #[tokio::test]
    async fn test_delete_declined_does_nothing() {
        let (manager, api, notifier) = setup(two_products());
        manager.load().await.unwrap();
        notifier.decline.set(true);

        manager.delete("1").await.unwrap();

        assert_eq!(notifier.confirms.get(), 1);
        assert_eq!(api.calls(), vec![Call::FetchAll]);
        assert_eq!(manager.store().read_state(|s| s.products.len()), 2);
    }

    #[tokio::test]
    async fn test_delete_reloads_on_success() {
        let (manager, api, _notifier) = setup(two_products());
        manager.load().await.unwrap();
        *api.body.borrow_mut() = json!([{ "id": "2", "name": "Caneta" }]);

        manager.delete("1").await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::FetchAll, Call::Delete("1".to_string()), Call::FetchAll]
        );
        assert_eq!(manager.store().read_state(|s| s.products.len()), 1);
        assert!(!manager.is_busy());
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list() {
        let (manager, api, notifier) = setup(two_products());
        manager.load().await.unwrap();
        let before = manager.store().read_state(|s| s.products.clone());
        api.fail_delete.set(true);

        let err = manager.delete("1").await.unwrap_err();

        assert!(matches!(err, ProductError::Delete(_)));
        assert_eq!(manager.store().read_state(|s| s.products.clone()), before);
        assert_eq!(notifier.alerts(), vec![MSG_DELETE_FAILED.to_string()]);
        assert!(!manager.is_busy());
    }

    #[tokio::test]
    async fn test_deleting_edited_record_leaves_edit_mode() {
        let (manager, _api, _notifier) = setup(two_products());
        manager.load().await.unwrap();
        let caderno = manager.store().read_state(|s| s.products[0].clone());
        manager.begin_edit(&caderno);

        manager.delete("1").await.unwrap();

        manager.store().read_state(|s| {
            assert_eq!(s.editing_id, None);
            assert!(s.name.is_empty());
        });
    }

    #[tokio::test]
    async fn test_cancel_edit_clears_form() {
        let (manager, api, _notifier) = setup(two_products());
        manager.load().await.unwrap();
        let caderno = manager.store().read_state(|s| s.products[0].clone());
        manager.begin_edit(&caderno);

        manager.cancel_edit();

        assert!(!manager.store().read_state(|s| s.is_edit_mode()));
        assert_eq!(api.calls(), vec![Call::FetchAll]);
    }
}
