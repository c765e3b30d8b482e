pub mod gravity_field;
