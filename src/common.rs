pub use std::net::SocketAddr;
pub use std::sync::Arc;

pub use tokio::time::Duration;

pub use log::{error, info, warn};

pub use flexi_logger::{Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, Naming};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};

pub use elasticsearch::{
    auth::Credentials as EsCredentials,
    http::response::Response,
    http::transport::{MultiNodeConnectionPool, Transport as EsTransport, TransportBuilder},
    http::Url,
    Elasticsearch, SearchParts,
};

pub use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
    routing::get,
    Json, Router,
};

pub use anyhow::{anyhow, Context};

pub use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

pub use getset::Getters;
pub use derive_new::new;

pub use once_cell::sync::Lazy as once_lazy;

pub use async_trait::async_trait;

pub use dotenv::dotenv;
