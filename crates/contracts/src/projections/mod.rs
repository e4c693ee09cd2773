pub mod p900_member_stats;
