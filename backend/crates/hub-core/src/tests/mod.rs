mod models;
mod ordering;
mod version_guard;
