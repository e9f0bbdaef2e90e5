// Purpose: conversions at the kernel/host boundary

pub mod pcm;
