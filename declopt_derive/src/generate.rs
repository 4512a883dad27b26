mod enumeration;
mod option;
mod unit;
