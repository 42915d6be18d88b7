#[dialecta_derive::shared_state]
pub struct Catalog {
    pub zones: Vec<String>,
}

fn main() {
    let catalog = Catalog::new(CatalogInner { zones: vec!["andino".to_owned()] });
    let clone = catalog.clone();
    assert!(Catalog::ptr_eq(&catalog, &clone));
    assert_eq!(clone.zones.len(), 1);
}
