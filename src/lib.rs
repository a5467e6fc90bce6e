//! Workspace-level integration tests for vitrine live under `tests/`.
