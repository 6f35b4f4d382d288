pub mod specifications;
