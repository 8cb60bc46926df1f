//! Which operators may be used against which property types.
//!
//! | Type | Operators |
//! |------|-----------|
//! | `string` | equals, any, none, in, contains |
//! | `number` | equals, greater_than, less_than, any, none, in |
//! | `enumerated` | equals, any, none, in |

use super::OperatorId;
use crate::attributes::ValueType;

const TEXT_OPERATORS: &[OperatorId] = &[
    OperatorId::Equals,
    OperatorId::Any,
    OperatorId::None,
    OperatorId::In,
    OperatorId::Contains,
];

const NUMBER_OPERATORS: &[OperatorId] = &[
    OperatorId::Equals,
    OperatorId::GreaterThan,
    OperatorId::LessThan,
    OperatorId::Any,
    OperatorId::None,
    OperatorId::In,
];

const ENUMERATED_OPERATORS: &[OperatorId] = &[
    OperatorId::Equals,
    OperatorId::Any,
    OperatorId::None,
    OperatorId::In,
];

pub fn legal_operators(value_type: ValueType) -> &'static [OperatorId] {
    match value_type {
        ValueType::Text => TEXT_OPERATORS,
        ValueType::Number => NUMBER_OPERATORS,
        ValueType::Enumerated => ENUMERATED_OPERATORS,
    }
}

pub fn is_legal(value_type: ValueType, operator: OperatorId) -> bool {
    legal_operators(value_type).contains(&operator)
}
