use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Attribute values of the resource a decision's condition formula is
/// evaluated against.
///
/// Attributes are plain string pairs; an attribute the instance does
/// not carry is reported as absent through [`get`](Self::get) rather
/// than defaulting to anything.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResourceInstance(HashMap<String, String>);

mod impls;
