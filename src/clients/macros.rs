/// Generates a client method that forwards to the wrapped `ResourceClient`,
/// with a tracing span per call.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $inner:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                self.inner.$inner($($param),*).await
            }
        }
    };
}
