pub mod rotation_mapper;
