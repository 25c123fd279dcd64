use crate::core::{
    actions, AdminRequest, ConnectSettings, Frame, GuardError, MenuEntryKind, NavState,
    SettingsUpdate, Submission,
};

fn names(state: &NavState) -> Vec<&str> {
    state.databases().iter().map(String::as_str).collect()
}

fn sample_nav() -> NavState {
    let mut nav = NavState::new();
    nav.set_databases(vec!["a".into(), "b".into(), "c".into()]);
    nav.set_parent(Some(1));
    nav.set_tables(vec!["t1".into(), "t2".into()]);
    nav
}

// ============================================================================
// Navigation state
// ============================================================================

#[test]
fn test_set_databases_replaces_wholesale() {
    let mut nav = NavState::new();
    nav.set_databases(vec!["x".into(), "y".into()]);
    nav.set_databases(vec!["z".into()]);
    assert_eq!(names(&nav), ["z"]);

    nav.set_databases(Vec::new());
    assert!(nav.databases().is_empty());
}

#[test]
fn test_delete_expanded_database_resets_parent() {
    let mut nav = sample_nav();
    nav.delete_database("b");

    assert_eq!(names(&nav), ["a", "c"]);
    assert_eq!(nav.parent(), None);
    assert_eq!(nav.parent_name(), None);
}

#[test]
fn test_delete_absent_database_is_noop() {
    let mut nav = sample_nav();
    nav.delete_database("nope");

    assert_eq!(names(&nav), ["a", "b", "c"]);
    assert_eq!(nav.parent(), Some(1));
    assert_eq!(nav.parent_name(), Some("b"));
}

#[test]
fn test_delete_earlier_database_keeps_parent_on_same_name() {
    let mut nav = NavState::new();
    nav.set_databases(vec!["a".into(), "b".into(), "c".into()]);
    nav.set_parent(Some(2));
    nav.delete_database("a");

    assert_eq!(names(&nav), ["b", "c"]);
    assert_eq!(nav.parent(), Some(1));
    assert_eq!(nav.parent_name(), Some("c"));
}

#[test]
fn test_delete_database_removes_every_occurrence() {
    let mut nav = NavState::new();
    nav.set_databases(vec!["a".into(), "b".into(), "a".into()]);
    nav.set_parent(Some(1));
    nav.delete_database("a");

    assert_eq!(names(&nav), ["b"]);
    assert_eq!(nav.parent(), Some(0));
    assert_eq!(nav.parent_name(), Some("b"));
}

#[test]
fn test_delete_table_removes_all_matches_preserving_order() {
    let mut nav = NavState::new();
    nav.set_tables(vec!["t1".into(), "t2".into(), "t1".into(), "t3".into()]);
    nav.delete_table("t1");

    assert_eq!(nav.tables(), ["t2".to_string(), "t3".to_string()]);

    nav.delete_table("missing");
    assert_eq!(nav.tables(), ["t2".to_string(), "t3".to_string()]);
}

#[test]
fn test_out_of_range_parent_is_accepted_and_ignored_at_render() {
    let mut nav = NavState::new();
    nav.set_databases(vec!["a".into(), "b".into()]);
    nav.set_parent(Some(7));

    assert_eq!(nav.parent(), Some(7));
    assert_eq!(nav.parent_name(), None);

    let entries = nav.menu_entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.indent == 1));
}

// ============================================================================
// Menu model
// ============================================================================

#[test]
fn test_menu_lists_every_database_once_when_none_expanded() {
    let mut nav = NavState::new();
    nav.set_databases(vec!["a".into(), "b".into(), "c".into()]);

    let entries = nav.menu_entries();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert!(entries
        .iter()
        .all(|e| e.kind == MenuEntryKind::Database && e.indent == 1));
}

#[test]
fn test_menu_shows_expanded_database_first_with_tables() {
    let nav = sample_nav();
    let entries = nav.menu_entries();

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b", "t1", "t2", "a", "c"]);

    assert_eq!(entries[0].kind, MenuEntryKind::Database);
    assert_eq!(entries[0].indent, 1);
    assert_eq!(entries[1].kind, MenuEntryKind::Table);
    assert_eq!(entries[1].indent, 2);
    assert_eq!(entries[2].indent, 2);

    // The expanded database never reappears at the top level.
    let b_count = entries.iter().filter(|e| e.name == "b").count();
    assert_eq!(b_count, 1);
}

#[test]
fn test_menu_entry_names_are_carried_as_data() {
    let hostile = "x'); <script>alert(1)</script>";
    let mut nav = NavState::new();
    nav.set_databases(vec![hostile.into()]);

    let entries = nav.menu_entries();
    assert_eq!(entries[0].name, hostile);
}

// ============================================================================
// Form guards and actions
// ============================================================================

#[test]
fn test_select_table_aborts_without_product_and_leaves_form_unchanged() {
    let mut req = AdminRequest::new();
    let before = req.clone();

    let result = req.select_table("orders", actions::PROPERTIES);
    assert_eq!(result, Err(GuardError::NoProduct));
    assert_eq!(req, before);
}

#[test]
fn test_select_table_aborts_without_database() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();
    let before = req.clone();

    let result = req.select_table("orders", actions::PROPERTIES);
    assert_eq!(result, Err(GuardError::NoDatabase));
    assert_eq!(req, before);
}

#[test]
fn test_select_table_resets_sort_state_and_pagination() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();
    req.database = "storefront".into();
    req.sortcolumn = "total".into();
    req.sortorder = "desc".into();
    req.startpos = 60;

    let result = req.select_table("orders", actions::PROPERTIES);
    assert_eq!(result, Ok(Submission::Replace(Frame::Right)));
    assert_eq!(req.table, "orders");
    assert_eq!(req.action, actions::PROPERTIES);
    assert_eq!(req.frame, Frame::Right);
    assert!(req.sortcolumn.is_empty());
    assert!(req.sortorder.is_empty());
    assert_eq!(req.startpos, 0);
}

#[test]
fn test_select_database_switch_refreshes_menu_pane() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();

    let result = req.select_database("storefront");
    assert_eq!(result, Ok(Submission::Replace(Frame::Left)));
    assert_eq!(req.database, "storefront");
    assert_eq!(req.action, actions::DB_DETAILS);
    assert_eq!(req.frame, Frame::Left);
}

#[test]
fn test_select_database_reselect_goes_to_detail_pane() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();
    req.database = "storefront".into();

    let result = req.select_database("storefront");
    assert_eq!(result, Ok(Submission::Replace(Frame::Right)));
    assert_eq!(req.action, actions::DB_DETAILS);
    assert_eq!(req.frame, Frame::Right);
}

#[test]
fn test_select_database_aborts_without_product() {
    let mut req = AdminRequest::new();
    let before = req.clone();

    assert_eq!(req.select_database("storefront"), Err(GuardError::NoProduct));
    assert_eq!(req, before);
}

#[test]
fn test_change_product_clears_selections() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();
    req.table = "orders".into();
    req.column = "total".into();
    req.action = actions::PROPERTIES.into();

    assert_eq!(req.change_product(), Submission::ReloadAll);
    assert!(req.dbproduct.is_empty());
    assert!(req.table.is_empty());
    assert!(req.column.is_empty());
    assert!(req.action.is_empty());
    assert_eq!(req.frame, Frame::Top);
}

#[test]
fn test_go_home_clears_table_and_column() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();
    req.database = "storefront".into();
    req.table = "orders".into();
    req.column = "total".into();
    req.action = actions::PROPERTIES.into();

    assert_eq!(req.go_home(), Submission::Replace(Frame::Right));
    assert!(req.table.is_empty());
    assert!(req.column.is_empty());
    assert!(req.action.is_empty());
    assert_eq!(req.database, "storefront");
}

#[test]
fn test_select_clears_projection_and_rewinds() {
    let mut req = AdminRequest::new();
    req.dbproduct = "mysql".into();
    req.database = "storefront".into();
    req.selectcols = "id,total".into();
    req.startpos = 90;

    let result = req.select("orders", "total > 10");
    assert_eq!(result, Ok(Submission::Replace(Frame::Right)));
    assert!(req.selectcols.is_empty());
    assert_eq!(req.startpos, 0);
    assert_eq!(req.selectwhere, "total > 10");
    assert_eq!(req.action, actions::DOSELECT);
    assert_eq!(req.table, "orders");
}

#[test]
fn test_set_sort_column_rewinds_pagination() {
    let mut req = AdminRequest::new();
    req.startpos = 120;
    req.set_sort_column("total");

    assert_eq!(req.sortcolumn, "total");
    assert_eq!(req.startpos, 0);

    req.set_sort_order("desc");
    assert_eq!(req.sortorder, "desc");
}

#[test]
fn test_field_setters_assign_their_fields() {
    let mut req = AdminRequest::new();

    assert_eq!(req.constraint, None);
    req.set_constraint("total > 100");
    assert_eq!(req.constraint.as_deref(), Some("total > 100"));

    req.set_primary_keys("id,region", "7,eu");
    assert_eq!(req.primarykeys, "id,region");
    assert_eq!(req.values, "7,eu");

    req.set_index_name("orders_by_date");
    assert_eq!(req.indexname, "orders_by_date");

    req.set_next_action(actions::PROPERTIES);
    assert_eq!(req.nextaction, actions::PROPERTIES);

    req.set_column("total");
    assert_eq!(req.column, "total");

    req.set_start_pos(90);
    req.set_num_rows(50);
    assert_eq!(req.startpos, 90);
    assert_eq!(req.numrows, 50);
}

#[test]
fn test_wire_field_names_are_preserved() {
    let req = AdminRequest::new();
    let value = serde_json::to_value(&req).unwrap();
    let object = value.as_object().unwrap();

    for field in [
        "dbproduct",
        "database",
        "table",
        "column",
        "action",
        "frame",
        "primarykeys",
        "values",
        "indexname",
        "sortcolumn",
        "sortorder",
        "startpos",
        "numrows",
        "fkeyrows",
        "usemultiline",
        "nextaction",
        "selectcols",
        "selectwhere",
    ] {
        assert!(object.contains_key(field), "missing wire field {field}");
    }
    assert_eq!(value["frame"], "right");
    assert_eq!(value["numrows"], 30);
    assert_eq!(value["fkeyrows"], 100);
    assert_eq!(value["usemultiline"], true);
    // An unset constraint stays off the wire entirely.
    assert!(!object.contains_key("constraint"));
}

#[test]
fn test_apply_settings_copies_options_inputs() {
    let mut req = AdminRequest::new();
    req.apply_settings(&SettingsUpdate {
        newfkeyrows: 250,
        newusemultiline: false,
    });

    assert_eq!(req.fkeyrows, 250);
    assert!(!req.usemultiline);
}

#[test]
fn test_connect_aborts_on_incomplete_settings() {
    let mut req = AdminRequest::new();
    let before = req.clone();

    let missing_product = ConnectSettings {
        database: "storefront".into(),
        ..Default::default()
    };
    assert_eq!(req.connect(&missing_product), Err(GuardError::NoProduct));
    assert_eq!(req, before);

    let missing_database = ConnectSettings {
        dbproduct: "mysql".into(),
        ..Default::default()
    };
    assert_eq!(req.connect(&missing_database), Err(GuardError::NoDatabase));
    assert_eq!(req, before);
}

#[test]
fn test_connect_populates_connection_fields() {
    let mut req = AdminRequest::new();
    let settings = ConnectSettings {
        dbproduct: "mysql".into(),
        hostname: "db.internal".into(),
        port: Some(3306),
        ssl: true,
        username: "admin".into(),
        password: "hunter2".into(),
        database: "storefront".into(),
    };

    let result = req.connect(&settings);
    assert_eq!(result, Ok(Submission::Replace(Frame::Left)));
    assert_eq!(req.action, actions::DB_DETAILS);
    assert_eq!(req.hostname, "db.internal");
    assert_eq!(req.port, Some(3306));
    assert!(req.ssl);
    assert!(req.is_connected());
}

// ============================================================================
// Catalog dispatch (server side)
// ============================================================================

#[cfg(feature = "ssr")]
mod catalog {
    use super::*;
    use crate::core::catalog::{CatalogState, NavApiError};
    use crate::core::protocol::PanePayload;

    fn connected_request() -> AdminRequest {
        let mut req = AdminRequest::new();
        req.dbproduct = "mysql".into();
        req.database = "analytics".into();
        req
    }

    #[test]
    fn test_left_refresh_positions_parent_by_database_order() {
        let state = CatalogState::with_demo_data();
        let mut req = connected_request();
        req.frame = Frame::Left;
        req.action = actions::DB_DETAILS.into();

        let resp = state.dispatch(&req).unwrap();
        let nav = resp.nav.expect("menu submission returns nav state");
        assert_eq!(nav.databases, ["storefront", "analytics"]);
        assert_eq!(nav.parent, Some(1));
        assert_eq!(nav.tables, ["events", "sessions"]);
        assert!(resp.pane.is_none());
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let state = CatalogState::with_demo_data();
        let mut req = connected_request();
        req.dbproduct = "oracle".into();
        req.frame = Frame::Left;

        match state.dispatch(&req) {
            Err(NavApiError::UnknownProduct(name)) => assert_eq!(name, "oracle"),
            other => panic!("expected UnknownProduct, got {other:?}"),
        }
    }

    #[test]
    fn test_guards_are_rechecked_server_side() {
        let state = CatalogState::with_demo_data();
        let mut req = AdminRequest::new();
        req.frame = Frame::Left;

        assert!(matches!(
            state.dispatch(&req),
            Err(NavApiError::Guard(GuardError::NoProduct))
        ));
    }

    #[test]
    fn test_empty_action_renders_the_root_view() {
        let state = CatalogState::with_demo_data();
        let req = AdminRequest::new();

        let resp = state.dispatch(&req).unwrap();
        match resp.pane {
            Some(PanePayload::Welcome { version }) => {
                assert_eq!(version, env!("CARGO_PKG_VERSION"));
            }
            other => panic!("expected Welcome, got {other:?}"),
        }
    }

    #[test]
    fn test_show_options_echoes_current_settings() {
        let state = CatalogState::with_demo_data();
        let mut req = AdminRequest::new();
        req.action = actions::SHOW_OPTIONS.into();
        req.fkeyrows = 42;
        req.usemultiline = false;

        let resp = state.dispatch(&req).unwrap();
        assert_eq!(
            resp.pane,
            Some(PanePayload::Options {
                fkeyrows: 42,
                usemultiline: false,
            })
        );
    }

    #[test]
    fn test_dodrop_table_removes_it_from_the_catalog() {
        let state = CatalogState::with_demo_data();
        let mut req = AdminRequest::new();
        req.dbproduct = "mysql".into();
        req.database = "storefront".into();
        req.table = "orders".into();
        req.action = actions::DODROP_TABLE.into();

        let resp = state.dispatch(&req).unwrap();
        match resp.pane {
            Some(PanePayload::DatabaseDetails { tables, .. }) => {
                assert!(!tables.contains(&"orders".to_string()));
                assert!(tables.contains(&"customers".to_string()));
            }
            other => panic!("expected DatabaseDetails, got {other:?}"),
        }

        // Dropping again fails: the table is gone.
        assert!(matches!(
            state.dispatch(&req),
            Err(NavApiError::UnknownTable(_))
        ));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let state = CatalogState::with_demo_data();
        let mut req = connected_request();
        req.action = "explode".into();

        assert!(matches!(
            state.dispatch(&req),
            Err(NavApiError::UnknownAction(_))
        ));
    }
}
