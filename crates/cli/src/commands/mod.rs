pub mod block;
pub mod blocks;
