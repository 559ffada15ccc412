#[cfg(test)]
pub mod common;

#[cfg(test)]
mod credential_source;
#[cfg(test)]
mod realm_resolution;
#[cfg(test)]
mod token_manager;
#[cfg(test)]
mod tools_registry;
