mod concurrent_access;
mod site_config;
