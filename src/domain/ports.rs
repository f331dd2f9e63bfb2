pub trait ConfigProvider: Send + Sync {
    /// Value advertised in `Access-Control-Allow-Origin`, used verbatim.
    fn allowed_origin(&self) -> &str;
}
