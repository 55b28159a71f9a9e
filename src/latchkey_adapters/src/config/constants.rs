pub mod env {
    pub const DB_HOST_ENV_VAR: &str = "DB_HOST";
    pub const DB_PORT_ENV_VAR: &str = "DB_PORT";
    pub const DB_USER_ENV_VAR: &str = "DB_USER";
    pub const DB_PASSWORD_ENV_VAR: &str = "DB_PASSWORD";
    pub const DB_NAME_ENV_VAR: &str = "DB_NAME";
    pub const DB_SSLMODE_ENV_VAR: &str = "DB_SSLMODE";
    pub const DB_MAX_CONNECTIONS_ENV_VAR: &str = "DB_MAX_CONNECTIONS";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET_KEY";
    pub const COOKIE_SECURE_ENV_VAR: &str = "COOKIE_SECURE";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
    pub const HASH_MEMORY_KIB_ENV_VAR: &str = "HASH_MEMORY_KIB";
    pub const HASH_ITERATIONS_ENV_VAR: &str = "HASH_ITERATIONS";
    pub const HASH_PARALLELISM_ENV_VAR: &str = "HASH_PARALLELISM";
}

pub mod defaults {
    pub const DB_HOST: &str = "localhost";
    pub const DB_PORT: u16 = 5433;
    pub const DB_USER: &str = "postgres";
    pub const DB_PASSWORD: &str = "";
    pub const DB_NAME: &str = "postgres";
    pub const DB_SSLMODE: &str = "disable";
    pub const DB_MAX_CONNECTIONS: u32 = 5;
    pub const COOKIE_SECURE: bool = false;
    pub const HASH_MEMORY_KIB: u32 = 15000;
    pub const HASH_ITERATIONS: u32 = 2;
    pub const HASH_PARALLELISM: u32 = 1;
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret";
}
