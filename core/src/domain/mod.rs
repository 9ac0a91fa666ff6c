/// This module contains the domain logic for the application data transfer.
///
/// DTOs are used to transfer data between the application layers. The domain
/// layer does not depend on any other layer, so it can be reused by the ports
/// without pulling their dependencies.
///
pub mod dtos;
