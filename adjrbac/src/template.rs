use adjcore::{
    condition::Operator,
    decision::Value,
};

/// A comparison value offered to placeholder conditions, recorded off a
/// template permission held by one of the granted roles.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTemplate {
    pub attribute: String,
    pub operator: Operator,
    pub value: Value,
    pub provider: i64,
}

/// The usable value templates for one request, in catalog order.
///
/// Built once per `authorize` call and immutable from then on; resolving
/// a condition never writes back, so one template may serve any number
/// of consuming permissions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateIndex(Vec<ValueTemplate>);

mod impls;
