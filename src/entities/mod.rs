pub mod city;
pub mod geo_point;
