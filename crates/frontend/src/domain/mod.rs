pub mod a025_aid_package;
