//! Google Cloud access tokens for the GCE and GCS handlers.
//!
//! The credentials are the first service account key file that exists of:
//! the `jsonKeyPath` of the request, `GOOGLE_APPLICATION_CREDENTIALS`, the mounted secret of the handler.
//! A key is turned into an access token with a signed JWT (RS256) exchanged at the `token_uri` of the key.
//! Without a key file, the token of the default service account is read from the metadata server.
//!
//! Tokens are fetched per request and not cached.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
