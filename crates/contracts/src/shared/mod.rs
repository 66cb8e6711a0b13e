pub mod request_seq;
