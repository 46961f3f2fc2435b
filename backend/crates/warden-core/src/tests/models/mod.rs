mod identity;
mod identity_update;
mod provider;
