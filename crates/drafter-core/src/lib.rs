//! Drafter Core Types and Definitions
//!
//! This crate provides the foundational types for Drafter diagram scenes:
//!
//! - **Colors**: CSS color parsing and label contrast ([`color::Color`])
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Elements**: The placed-shape data model ([`element::Element`])
//! - **Draw**: Per-kind drawing recipes rendered to SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod element;
pub mod geometry;
