pub mod tf_serving;
