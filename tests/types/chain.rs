use core::fmt;
use std::error::Error;
use std::net::{AddrParseError, IpAddr};

use error_site::{err, wrap, Cause, LeafError, WrappedError};

/// A foreign error that keeps a wrapped error as its source.
#[derive(Debug)]
struct Layer {
    inner: WrappedError,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("layer failed")
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

fn addr_error() -> AddrParseError {
    "test addr".parse::<IpAddr>().unwrap_err()
}

#[test]
fn unwrap_reaches_original_cause() {
    let inner = addr_error();
    let error = wrap!(inner.clone(), "wrap simple error with message");

    assert!(error.contains(&inner));
    assert!(!error.contains(&fmt::Error));

    assert!(error.is::<WrappedError>());
    assert!(error.find::<WrappedError>().is_some_and(|found| std::ptr::eq(found, &error)));

    assert_eq!(error.find::<AddrParseError>(), Some(&inner));
    assert_eq!(error.inner().downcast_ref::<AddrParseError>(), Some(&inner));
}

#[test]
fn source_and_inner_are_the_same_value() {
    let error = wrap!(addr_error());
    let source = error.source().expect("wrapped errors always have a source");

    assert!(std::ptr::addr_eq(source, error.inner()));
}

#[test]
fn nested_unwrap_returns_inner_layer() {
    let inner = err!("inner");
    let inner_site = *inner.site();
    let outer = wrap!(inner, "outer");

    let unwrapped = outer.cause().as_wrapped().expect("nested layer");
    assert_eq!(unwrapped.site(), &inner_site);
    assert!(matches!(unwrapped.cause(), Cause::Message(leaf) if leaf.as_str() == "inner"));

    match outer.into_cause() {
        Cause::Nested(layer) => assert_eq!(*layer.site(), inner_site),
        other => panic!("expected nested cause, got {other:?}"),
    }
}

#[test]
fn queries_see_through_every_layer() {
    let inner = addr_error();
    let error = wrap!(wrap!(wrap!(inner.clone()), "middle"), "outer");

    assert!(error.contains(&inner));
    assert!(error.is::<AddrParseError>());
    assert!(!error.is::<fmt::Error>());
    assert_eq!(error.depth(), 3);
    assert_eq!(error.chain().count(), 4);
    assert_eq!(error.root_cause().to_string(), inner.to_string());
}

#[test]
fn leaf_is_the_root_cause() {
    let error = wrap!(wrap!(err!("disk full")), "saving");

    assert!(error.is::<LeafError>());
    assert_eq!(error.find::<LeafError>(), Some(&LeafError::new("disk full")));
    assert_eq!(error.root_cause().to_string(), "disk full");
}

#[test]
fn chain_yields_every_layer_then_leaf() {
    let error = wrap!(wrap!(err!("disk full")), "saving");
    let links: Vec<_> = error.chain().collect();

    assert_eq!(links.len(), 4);
    assert!(links[..3].iter().all(|link| link.is::<WrappedError>()));
    assert!(links[3].is::<LeafError>());
    assert_eq!(links[3].to_string(), "disk full");
}

#[test]
fn trail_lists_sites_outermost_first() {
    let (inner, inner_line) = (err!("inner"), line!());
    let (middle, middle_line) = (wrap!(inner), line!());
    let (outer, outer_line) = (wrap!(middle, "outer"), line!());

    let lines: Vec<u32> = outer.trail().iter().map(|site| site.line()).collect();
    assert_eq!(lines, [outer_line, middle_line, inner_line]);
}

#[test]
fn trail_follows_foreign_sources() {
    let inner = err!("inner");
    let inner_site = *inner.site();
    let outer = wrap!(Layer { inner });

    assert!(matches!(outer.cause(), Cause::Error(_)));
    let trail = outer.trail();
    assert_eq!(trail.len(), 2);
    assert_eq!(*trail[1], inner_site);
    assert_eq!(outer.root_cause().to_string(), "inner");
}

#[test]
fn passing_a_leaf_keeps_it_as_message() {
    let error = WrappedError::wrap(LeafError::new("plain"));
    assert!(matches!(error.cause(), Cause::Message(_)));

    let error: WrappedError = LeafError::new("converted").into();
    assert_eq!(error.inner().to_string(), "converted");
}

#[test]
fn boxed_errors_are_classified() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(err!("boxed"));
    assert!(matches!(Cause::from(boxed), Cause::Nested(_)));

    let boxed: Box<dyn Error + Send + Sync> = Box::new(addr_error());
    assert!(matches!(Cause::from(boxed), Cause::Error(_)));
}
