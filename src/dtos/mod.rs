pub mod billdtos;
pub mod chatdtos;
pub mod deliverydtos;
pub mod rentaldtos;
pub mod ridedtos;
pub mod userdtos;
