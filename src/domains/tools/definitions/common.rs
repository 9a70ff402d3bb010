//! Argument value sets shared by several operations.

use crate::domains::tools::schema::Literal;

/// Thumbnail sizes the upstream service renders, in pixels.
pub const THUMBNAIL_SIZES: &[Literal] = &[Literal::Num(42), Literal::Num(84), Literal::Num(200)];

/// Boolean flags are sent as integers.
pub const FLAG: &[Literal] = &[Literal::Num(0), Literal::Num(1)];
