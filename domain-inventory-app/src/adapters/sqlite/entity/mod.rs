pub mod domain_list;
