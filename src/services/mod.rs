pub mod ticket_gateway;

pub use ticket_gateway::TicketGateway;
