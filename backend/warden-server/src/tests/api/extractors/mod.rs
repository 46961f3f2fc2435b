mod bearer_token;
mod federation_caller;
