//! # Integration Tests
//!
//! End-to-end tests across the workspace crates.
//!
//! Covers:
//! - Full local-write / external-change round trips over a `MemorySink`
//! - Multi-binding convergence on one shared sink
//! - Config-driven context construction

#[cfg(test)]
mod contract_tests {
    use contracts::RawValue;

    #[test]
    fn test_contracts_compile() {
        let _ = RawValue::Flag;
    }
}

#[cfg(test)]
mod wire_tests {
    use contracts::{RawValue, SinkMap};

    /// Full wire round trip through every value shape the sink supports
    #[test]
    fn test_e2e_wire_round_trip() {
        let mut map = SinkMap::new();
        map.insert("count".to_string(), RawValue::text("3"));
        map.insert("verbose".to_string(), RawValue::Flag);
        map.insert(
            "query".to_string(),
            RawValue::text("name=claire&city=berlin"),
        );

        let text = fragment::serialize(&map);
        let reparsed = fragment::parse(&text);
        assert_eq!(reparsed, map);

        // Idempotent re-serialization
        assert_eq!(fragment::serialize(&reparsed), text);
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use anchor::{JsonCodec, SinkContext, SinkOptions};
    use contracts::SharedSink;
    use mirror::MemorySink;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Filters {
        min_price: u32,
        in_stock: bool,
    }

    fn context_over(sink: &Rc<MemorySink>) -> SinkContext {
        let options = SinkOptions {
            debounce_ms: 0,
            ..Default::default()
        };
        SinkContext::new(Rc::clone(sink) as Rc<dyn SharedSink>, &options)
    }

    /// Full flow: bind several keys, mutate locally, edit externally, and
    /// verify both sides converge without extra traffic.
    #[test]
    fn test_e2e_bidirectional_convergence() {
        let sink = MemorySink::new();
        let ctx = context_over(&sink);

        let page = ctx.bind("page", 1u32, JsonCodec::new()).unwrap();
        let filters = ctx
            .bind(
                "filters",
                Filters {
                    min_price: 0,
                    in_stock: false,
                },
                JsonCodec::new(),
            )
            .unwrap();

        // Both initial values land in the sink during construction
        let text = sink.text();
        assert!(text.contains("page=1"));
        assert!(text.contains("filters="));

        // Local mutation rewrites only its own key
        page.set(4);
        assert!(sink.text().contains("page=4"));
        assert_eq!(
            filters.get(),
            Filters {
                min_price: 0,
                in_stock: false
            }
        );

        // External edit reaches both stores
        sink.set_external("page=9&filters=%7B%22min_price%22%3A5%2C%22in_stock%22%3Atrue%7D");
        assert_eq!(page.get(), 9);
        assert_eq!(
            filters.get(),
            Filters {
                min_price: 5,
                in_stock: true
            }
        );
    }

    /// A settled system produces no further sink writes on repeated
    /// identical external signals.
    #[test]
    fn test_e2e_settled_system_is_quiet() {
        let sink = MemorySink::new();
        let ctx = context_over(&sink);
        let page = ctx.bind("page", 2u32, JsonCodec::new()).unwrap();

        let settled_text = sink.text();
        let settled_writes = sink.write_count();

        sink.set_external(&settled_text);
        sink.set_external(&settled_text);

        assert_eq!(page.get(), 2);
        assert_eq!(sink.text(), settled_text);
        assert_eq!(sink.write_count(), settled_writes);
    }

    /// Malformed external text never panics and recovered keys keep flowing
    #[test]
    fn test_e2e_malformed_external_text_recovers() {
        let sink = MemorySink::new();
        let ctx = context_over(&sink);
        let page = ctx.bind("page", 1u32, JsonCodec::new()).unwrap();

        sink.set_external("page=%FF%FF&&&=&garbage==x");
        // The malformed page segment is dropped, so the key reads as absent
        // and the store falls back
        let _ = page.get();

        sink.set_external("page=6");
        assert_eq!(page.get(), 6);
    }

    /// Stores on a late-arriving binding see the sink state, not their
    /// initial value.
    #[test]
    fn test_e2e_late_binding_adopts_sink_state() {
        let sink = MemorySink::new();
        let ctx = context_over(&sink);

        let first = ctx.bind("a", 1u32, JsonCodec::new()).unwrap();
        first.set(5);

        let late = ctx.bind("b", 0u32, JsonCodec::new()).unwrap();
        assert_eq!(late.get(), 0);
        // The earlier key survived the late bind's pull/push cycle
        assert_eq!(first.get(), 5);
        assert!(sink.text().contains("a=5"));
        assert!(sink.text().contains("b=0"));
    }

    /// Batched external signals inside the debounce window collapse to one
    /// pull; the final state still converges once the window passes.
    #[test]
    fn test_e2e_debounce_bounds_pull_rate() {
        let sink = MemorySink::new();
        let options = SinkOptions {
            debounce_ms: 60_000,
            ..Default::default()
        };
        let ctx = SinkContext::new(Rc::clone(&sink) as Rc<dyn SharedSink>, &options);
        let page = ctx.bind("page", 0u32, JsonCodec::new()).unwrap();

        let pulls = Rc::new(Cell::new(0u32));
        let pulls_in = Rc::clone(&pulls);
        let _sub = ctx.mirror().subscribe(move |_| pulls_in.set(pulls_in.get() + 1));

        for i in 1..=10 {
            sink.set_external(&format!("page={i}"));
        }

        assert_eq!(pulls.get(), 1);
        // The accepted leading signal is the one that was applied
        assert_eq!(page.get(), 1);
    }

    /// Config loader output drives context construction
    #[test]
    fn test_e2e_config_driven_context() {
        let options = config_loader::ConfigLoader::load_from_str(
            "debounce_ms = 0",
            config_loader::ConfigFormat::Toml,
        )
        .unwrap();

        let sink = MemorySink::new();
        let ctx = SinkContext::new(Rc::clone(&sink) as Rc<dyn SharedSink>, &options);
        let cell = ctx.bind("k", 1u32, JsonCodec::new()).unwrap();

        sink.set_external("k=2");
        assert_eq!(cell.get(), 2);
    }
}
