pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod favorite {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

#[cfg(test)]
pub mod test_support;
