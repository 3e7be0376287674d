pub mod tagline_list;
