//! Serve the JSON API over HTTP

/// Start the API server on the given port (blocks)
pub fn serve(port: u16) -> anyhow::Result<()> {
    let root = super::workspace_root()?;
    taskflow::server::serve(&root, port)
}
