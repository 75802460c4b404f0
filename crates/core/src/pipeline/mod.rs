pub mod analyze_audio_use_case;
pub mod spotting_pipeline;
