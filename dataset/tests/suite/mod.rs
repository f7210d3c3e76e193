mod cache_flow;
mod download;
