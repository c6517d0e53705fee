pub mod a001_location;
pub mod a002_reservation;
pub mod a003_sale_offer;
pub mod a004_order;
