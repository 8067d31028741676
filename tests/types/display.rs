use error_site::{CallSite, WrappedError};

fn nested_chain() -> WrappedError {
    let db = CallSite::new("src/db.rs", 10, "app::db::query::__site");
    let service = CallSite::new("src/service/profile.rs", 20, "app::service::load");
    let handler = CallSite::new("src/api/handler.rs", 30, "app::api::handler");

    let inner = WrappedError::new_at(db, "connection refused");
    let middle = WrappedError::wrap_at(service, inner);
    WrappedError::wrap_with_msg_at(handler, middle, "loading \"profile\"")
}

#[test]
fn default_display_is_nested_json() {
    let expected = concat!(
        r#"{"caused":{"caused":{"caused":"connection refused","funcname":"db::query","fileline":"db.rs:10"},"#,
        r#""funcname":"service::load","fileline":"profile.rs:20"},"#,
        r#""funcname":"api::handler","fileline":"handler.rs:30","message":"loading \"profile\""}"#,
    );
    assert_eq!(nested_chain().to_string(), expected);
}

#[test]
fn alternate_display_cascades() {
    let expected = "handler.rs:30 in api::handler: loading \"profile\"\n\
                    \x20 profile.rs:20 in service::load\n\
                    \x20   db.rs:10 in db::query\n\
                    \x20     connection refused";
    assert_eq!(format!("{:#}", nested_chain()), expected);
}

#[test]
fn alternate_display_of_single_layer() {
    let site = CallSite::new("main.rs", 3, "main");
    let error = WrappedError::wrap_with_msg_at(site, core::fmt::Error, "writing");

    assert_eq!(
        format!("{error:#}"),
        "main.rs:3 in main: writing\n  an error occurred when formatting an argument"
    );
}
