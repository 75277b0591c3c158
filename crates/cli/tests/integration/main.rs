//! Integration tests running the tpbuild binary against throwaway project trees.

mod common;
