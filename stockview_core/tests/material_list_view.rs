use std::path::Path;

use crossbeam_channel::{Receiver, Sender};
use stockview_core::{
    filter::SearchOptions,
    list_view::{MaterialListRender, MaterialListView, NO_RESULTS_MESSAGE},
    material::Material,
    navigation::{NavigationRequest, Navigator, Route},
    store::MaterialStore,
    Result, StockviewCoreError,
};

const TEST_MATERIALS_FILE_PATH: &str = "tests/data/materials.json";

/// Navigator that queues requests, the same way the frontends do
struct QueueNavigator {
    tx: Sender<NavigationRequest>,
    rx: Receiver<NavigationRequest>,
}

impl QueueNavigator {
    fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }
}

impl Navigator for QueueNavigator {
    fn navigate(&self, request: NavigationRequest) -> Result<()> {
        self.tx
            .send(request)
            .map_err(|err| StockviewCoreError::NavigationError(err.to_string()))
    }
}

fn bolt_and_nut_view() -> MaterialListView {
    MaterialListView::new(MaterialStore::new(vec![
        Material::new("A1", "Bolt", "yes"),
        Material::new("A2", "Nut", "no"),
    ]))
}

#[test]
fn test_view_starts_unfiltered() {
    let view = bolt_and_nut_view();
    assert_eq!(view.search_filter(), "");
    assert_eq!(view.filtered_view().expect("filtered view").len(), 2);
}

#[test]
fn test_select_filtered_row() {
    let mut view = bolt_and_nut_view();
    let navigator = QueueNavigator::new();

    view.update_filter("A1");
    let render = view.render().expect("render");
    let rows = render.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "A1");
    assert_eq!(rows[0].name, "Bolt");
    assert_eq!(rows[0].used, "yes");

    view.select_material(rows[0].material.clone(), &navigator)
        .expect("selection");
    let request = navigator.rx.try_recv().expect("navigation request");
    assert_eq!(request.route, Route::MaterialDetail);
    assert_eq!(
        request.payload.map(|payload| payload.material),
        Some(Material::new("A1", "Bolt", "yes"))
    );
    assert!(navigator.rx.try_recv().is_err());
}

#[test]
fn test_select_with_disconnected_navigator() {
    let mut view = bolt_and_nut_view();
    let (tx, rx) = crossbeam_channel::unbounded();
    drop(rx);
    // Nothing listens on the other end anymore
    let navigator = QueueNavigator {
        tx,
        rx: crossbeam_channel::never(),
    };

    view.update_filter("A2");
    let render = view.render().expect("render");
    let result = view.select_material(render.rows()[0].material.clone(), &navigator);
    assert!(matches!(
        result,
        Err(StockviewCoreError::NavigationError(_))
    ));
}

#[test]
fn test_empty_store_renders_no_results() {
    let view = MaterialListView::new(MaterialStore::default());
    assert_eq!(
        view.render().expect("render"),
        MaterialListRender::NoResults("No matching materials")
    );
}

#[test]
fn test_unmatched_filter_renders_no_results() {
    let mut view = bolt_and_nut_view();
    view.update_filter("Z");
    let render = view.render().expect("render");
    assert_eq!(render, MaterialListRender::NoResults(NO_RESULTS_MESSAGE));
    assert!(render.rows().is_empty());
}

#[test]
fn test_view_follows_store_updates() {
    let store = MaterialStore::default();
    let mut view = MaterialListView::new(store.clone());
    view.update_filter("B");
    assert!(view.filtered_view().expect("filtered view").is_empty());

    store
        .set_materials(vec![Material::new("B7", "Bracket", 2_i64)])
        .expect("store update");
    assert_eq!(view.filtered_view().expect("filtered view").len(), 1);
}

#[test]
fn test_search_options() {
    let mut view = bolt_and_nut_view();
    view.update_filter("a");
    assert!(view.filtered_view().expect("filtered view").is_empty());

    view.set_search_options(SearchOptions {
        case_insensitive: true,
        use_regex: false,
    });
    assert_eq!(view.filtered_view().expect("filtered view").len(), 2);

    view.set_search_options(SearchOptions {
        case_insensitive: false,
        use_regex: true,
    });
    view.update_filter("2$");
    let filtered_list = view.filtered_view().expect("filtered view");
    assert_eq!(filtered_list, vec![Material::new("A2", "Nut", "no")]);
}

#[test]
fn test_render_materials_file() {
    let store =
        MaterialStore::load_from_file(Path::new(TEST_MATERIALS_FILE_PATH)).expect("load file");
    let mut view = MaterialListView::new(store);
    view.update_filter("CST");

    let render = view.render().expect("render");
    let snapshot_data = render
        .rows()
        .iter()
        .map(|row| format!("{}: {} ({})", row.id, row.name, row.used))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(snapshot_data, @r###"
    CST-100: Grey iron casting (12)
    CST-101: Ductile iron casting (4.5)
    CST-102:  ()
    "###);
}
