//! Headless core of the `gsearch` global search widget.
//!
//! The crate is split along the data flow of a single search: keystrokes are
//! collapsed by the [`debounce`] timer, the [`widget`] state machine decides
//! whether a request is issued, the [`worker`] performs it through a
//! [`client`], the response is classified by [`payload`] and finally grouped
//! into display rows by [`rows`]. Nothing here touches a terminal, so every
//! step can be driven from tests with explicit instants.

pub mod client;
pub mod debounce;
pub mod links;
pub mod model;
pub mod payload;
pub mod rows;
pub mod sequence;
pub mod widget;
pub mod worker;

pub use client::{ClientError, HttpSearchClient, SearchClient};
pub use debounce::Debouncer;
pub use links::Links;
pub use model::{Category, EntityId, Group, Product, SearchResponse};
pub use payload::SearchPayload;
pub use rows::{ResultRow, RowKind, RowList, render_rows};
pub use sequence::RequestSequence;
pub use widget::{Applied, SearchRequest, SearchWidget, WidgetOptions, WidgetPhase};
pub use worker::{SearchCommand, SearchResult};
