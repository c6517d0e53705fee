pub mod u001_place_order;
