//! Shared test utilities used across gilbert crates.

pub mod tracing {
    //! Recording layer for capturing spans and events in tests.

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer installed during tests to capture the spans and events the
    /// pipeline emits, so instrumentation can be asserted deterministically.
    ///
    /// # Examples
    /// ```
    /// use gilbert_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// assert!(layer.spans().is_empty());
    /// assert!(layer.events().is_empty());
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans.lock().expect("lock poisoned").clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events.lock().expect("lock poisoned").clone()
        }
    }

    /// Snapshot of a closed span: its name and the fields recorded on it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Structured fields recorded against the span, rendered as text.
        pub fields: HashMap<String, String>,
    }

    /// Snapshot of an emitted event: its level, target, and fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level the event was emitted at.
        pub level: Level,
        /// Event target from the metadata.
        pub target: String,
        /// Structured fields attached to the event, rendered as text.
        pub fields: HashMap<String, String>,
    }

    #[derive(Default)]
    struct SpanData {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                let mut data = SpanData {
                    name: attrs.metadata().name().to_owned(),
                    fields: HashMap::new(),
                };
                attrs.record(&mut FieldRecorder {
                    fields: &mut data.fields,
                });
                span.extensions_mut().insert(data);
            }
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            let Some(data) = extensions.get_mut::<SpanData>() else {
                return;
            };
            values.record(&mut FieldRecorder {
                fields: &mut data.fields,
            });
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(data) = span.extensions_mut().remove::<SpanData>() else {
                return;
            };
            self.spans.lock().expect("lock poisoned").push(SpanRecord {
                name: data.name,
                fields: data.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder {
                fields: &mut fields,
            });
            self.events
                .lock()
                .expect("lock poisoned")
                .push(EventRecord {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    // Renders every field value as text; the trial spans only carry
    // integers, floats, and display-formatted errors.
    struct FieldRecorder<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields
                .insert(field.name().to_owned(), value.to_owned());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.fields
                .insert(field.name().to_owned(), value.to_string());
        }
    }
}

pub mod fixtures {
    //! Deterministic graph builders with known statistics, used to pin down
    //! estimator behaviour without randomness.

    use gilbert_core::Graph;

    /// Builds the path graph `0-1-…-(nodes-1)`.
    ///
    /// Connected for any `nodes >= 1`; the five-node instance has an exact
    /// average path length of `2.0`.
    ///
    /// # Panics
    /// Panics when `nodes` is zero, since the endpoints would not exist.
    ///
    /// # Examples
    /// ```
    /// use gilbert_test_support::fixtures::path_graph;
    ///
    /// let graph = path_graph(5);
    /// assert_eq!(graph.edge_count(), 4);
    /// ```
    #[must_use]
    pub fn path_graph(nodes: usize) -> Graph {
        assert!(nodes >= 1, "a path graph needs at least one node");
        Graph::from_edges(nodes, (1..nodes).map(|node| (node - 1, node)))
            .expect("consecutive node pairs are valid edges")
    }

    /// Builds the cycle graph over `nodes` nodes.
    ///
    /// # Panics
    /// Panics when `nodes` is below three, since shorter cycles would need a
    /// self-loop or duplicate edge.
    #[must_use]
    pub fn cycle_graph(nodes: usize) -> Graph {
        assert!(nodes >= 3, "a cycle graph needs at least three nodes");
        let edges = (0..nodes).map(|node| (node, (node + 1) % nodes));
        Graph::from_edges(nodes, edges).expect("cycle edges are valid")
    }

    /// Builds the complete graph over `nodes` nodes: every unordered pair
    /// carries an edge, so the average path length and every clustering
    /// coefficient equal `1.0` and the average degree is `nodes - 1`.
    #[must_use]
    pub fn complete_graph(nodes: usize) -> Graph {
        let edges = (0..nodes).flat_map(|left| ((left + 1)..nodes).map(move |right| (left, right)));
        Graph::from_edges(nodes, edges).expect("complete edges are valid")
    }

    /// Builds the star graph with centre `0` and `nodes - 1` leaves. Every
    /// leaf's clustering coefficient is undefined and the centre's is zero.
    ///
    /// # Panics
    /// Panics when `nodes` is below three, where the centre would have
    /// fewer than two leaves.
    #[must_use]
    pub fn star_graph(nodes: usize) -> Graph {
        assert!(nodes >= 3, "a star graph needs at least three nodes");
        Graph::from_edges(nodes, (1..nodes).map(|leaf| (0, leaf)))
            .expect("star edges are valid")
    }

    /// Builds a graph with `nodes` nodes and no edges; disconnected for any
    /// `nodes >= 2`.
    #[must_use]
    pub fn edgeless_graph(nodes: usize) -> Graph {
        Graph::with_nodes(nodes)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        use rstest::rstest;

        #[rstest]
        #[case(1, 0)]
        #[case(2, 1)]
        #[case(5, 4)]
        fn path_graph_edge_counts(#[case] nodes: usize, #[case] edges: usize) {
            assert_eq!(path_graph(nodes).edge_count(), edges);
        }

        #[test]
        fn cycle_graph_closes_the_loop() {
            let graph = cycle_graph(4);
            assert_eq!(graph.edge_count(), 4);
            assert!(graph.has_edge(3, 0));
        }

        #[rstest]
        #[case(3, 3)]
        #[case(6, 15)]
        fn complete_graph_edge_counts(#[case] nodes: usize, #[case] edges: usize) {
            assert_eq!(complete_graph(nodes).edge_count(), edges);
        }

        #[test]
        fn star_graph_centre_reaches_every_leaf() {
            let graph = star_graph(6);
            assert_eq!(graph.degree(0), Some(5));
            for leaf in 1..6 {
                assert_eq!(graph.degree(leaf), Some(1));
            }
        }
    }
}
