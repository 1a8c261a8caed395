pub mod attendance;
pub mod employee;
pub mod health;
pub mod validation;

#[cfg(test)]
mod tests;
